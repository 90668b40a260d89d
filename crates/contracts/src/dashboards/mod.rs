pub mod d400_global_overview;
pub mod d401_unit_overview;
pub mod d402_employee_profile;
