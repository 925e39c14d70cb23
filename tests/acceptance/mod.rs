mod utils_controller_test;
