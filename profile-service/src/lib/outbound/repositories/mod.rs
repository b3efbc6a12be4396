pub mod profile;

pub use profile::SqliteProfileRepository;
