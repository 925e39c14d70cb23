pub mod check_user;
