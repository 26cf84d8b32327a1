pub mod key_value_store;
pub mod round_repository;
pub mod session_repository;
pub mod student_repository;

pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore, MongoKeyValueStore};
pub use round_repository::{KvRoundRepository, RoundRepository};
pub use session_repository::{KvSessionStore, SessionStore};
pub use student_repository::{KvStudentRepository, StudentRepository};
