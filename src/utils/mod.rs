pub mod get_env;
