pub mod reference_point;
pub mod restaurant_record;
pub mod search_query;
pub mod search_result;
