mod rest;

pub use rest::ApiClient;
