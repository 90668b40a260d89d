pub mod hr_workbook;
pub mod org_units;
