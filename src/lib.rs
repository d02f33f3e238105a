#![doc = include_str!("../README.md")]

extern crate alloc;

mod activity;
mod error;
mod fetcher;
mod http_client;
mod request;
mod response;

pub use self::{
    activity::Activity,
    error::Error,
    fetcher::{BASE_URL, Fetcher},
    http_client::{HttpClient, HttpClientError, ReqwestHttpClient},
    request::Request,
    response::Response,
};
