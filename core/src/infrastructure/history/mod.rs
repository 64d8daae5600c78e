pub mod repository;

pub use repository::FileHistoryRepository;
