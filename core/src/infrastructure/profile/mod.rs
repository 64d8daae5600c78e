pub mod repository;

pub use repository::FileProfileRepository;
