// Workbook lifecycle handlers
pub mod hr_workbook;

// Dashboard handlers (d400-d402)
pub mod d400_global_overview;
pub mod d401_unit_overview;
pub mod d402_employee_profile;
