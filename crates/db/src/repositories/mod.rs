//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod academic_year_repo;
pub mod announcement_repo;
pub mod attendance_repo;
pub mod class_subject_repo;
pub mod fee_repo;
pub mod gallery_repo;
pub mod public_info_repo;
pub mod result_repo;
pub mod school_class_repo;
pub mod session_repo;
pub mod student_repo;
pub mod subject_repo;
pub mod teacher_repo;
pub mod term_repo;
pub mod user_repo;

pub use academic_year_repo::AcademicYearRepo;
pub use announcement_repo::AnnouncementRepo;
pub use attendance_repo::AttendanceRepo;
pub use class_subject_repo::ClassSubjectRepo;
pub use fee_repo::FeeRepo;
pub use gallery_repo::{GalleryCategoryRepo, GalleryImageRepo};
pub use public_info_repo::{NewsRepo, SchoolInfoRepo};
pub use result_repo::ResultRepo;
pub use school_class_repo::SchoolClassRepo;
pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
pub use teacher_repo::TeacherRepo;
pub use term_repo::TermRepo;
pub use user_repo::UserRepo;
