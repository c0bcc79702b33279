//! Authorization strategies applied to every outgoing request.
//!
//! A [`Client`](crate::Client) holds exactly one [`Authorizer`] and invokes it
//! once per request, after the request is built and before it is sent.

mod signed;
mod token;

use reqwest::Request;
use std::sync::Arc;

use crate::error::Result;

pub use signed::SignedAuth;
pub use token::TokenAuth;

/// Attaches credential material to an outgoing request.
///
/// One instance is shared by every call made through a client, possibly from
/// several tasks at once.
#[cfg_attr(test, mockall::automock)]
pub trait Authorizer: Send + Sync {
    fn auth(&self, request: &mut Request) -> Result<()>;
}

impl<A: Authorizer + ?Sized> Authorizer for Arc<A> {
    fn auth(&self, request: &mut Request) -> Result<()> {
        (**self).auth(request)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for Box<A> {
    fn auth(&self, request: &mut Request) -> Result<()> {
        (**self).auth(request)
    }
}

/// Sends requests without credentials, for the public endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authorizer for NoAuth {
    fn auth(&self, _request: &mut Request) -> Result<()> {
        Ok(())
    }
}
