use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub data: Option<DataConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DataConfig {
    /// Default CSV location, used when --data is not given
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
data:
  path: /srv/hr/employees.csv
scoring:
  rating_weight: 0.5
  award_bonus: 12
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(
            config.data.unwrap().path.unwrap(),
            PathBuf::from("/srv/hr/employees.csv")
        );
        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.award_bonus, Some(12.0));
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.data.is_none());
        assert!(config.scoring.is_none());
    }
}
