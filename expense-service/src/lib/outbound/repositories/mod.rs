pub mod expense;

pub use expense::SqliteExpenseRepository;
