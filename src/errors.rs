use snafu::Snafu;

pub type CustomResult<T> = Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("request to `{url}` failed: {source}"))]
    ApiRequest { url: String, source: reqwest::Error },

    #[snafu(display("reading the body of `{url}` failed: {source}"))]
    ApiBody { url: String, source: reqwest::Error },

    #[snafu(display("could not decode the response from `{url}`: {source}"))]
    ApiDecode {
        url: String,
        source: serde_json::Error,
    },

    #[snafu(display("invalid total count `{value}` in response envelope: {source}"))]
    InvalidTotal {
        value: String,
        source: std::num::ParseIntError,
    },

    #[snafu(display("page fetch task failed: {source}"))]
    PageJoin { source: tokio::task::JoinError },
}
