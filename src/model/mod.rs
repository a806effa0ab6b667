pub mod date;
pub mod employee;
pub mod month;
pub mod salary;
