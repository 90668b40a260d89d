pub mod payroll;
pub mod workforce;
