/// One employee row after loading. `previous_year_rating` is always
/// present here; the loader imputes missing values before records leave
/// the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub employee_id: String,        // opaque identifier, assumed unique
    pub department: String,         // grouping key for summaries
    pub previous_year_rating: f64,  // ordinal, nominal range 1-5
    pub avg_training_score: f64,    // 0-100
    pub awards_won: bool,           // encoded 0/1 in the source file
    pub length_of_service: u32,     // whole years
}
