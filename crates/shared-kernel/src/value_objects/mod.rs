pub mod subject_name;

pub use subject_name::SubjectName;
