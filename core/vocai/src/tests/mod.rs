pub mod run_app_tests;
