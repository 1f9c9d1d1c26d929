mod response_validator;

pub use response_validator::ResponseValidator;
