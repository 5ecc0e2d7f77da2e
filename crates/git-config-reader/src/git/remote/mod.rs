use crate::error::{Error, Result};
use derive_more::Display;
use log::trace;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{char, satisfy};
use nom::combinator::{opt, recognize, rest, verify};
use nom::error::{context, ContextError, ParseError};
use nom::sequence::pair;
use nom::IResult;

#[cfg(test)]
mod tests;

const GIT_SUFFIX: &str = ".git";

/// A remote URL in one of the two shapes git accepts for network remotes.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum RemoteUrl<'a> {
    /// `scheme://host/path`, e.g. `https://github.com/owner/repo.git`. Any
    /// `?query` or `#fragment` is dropped.
    #[display(fmt = "{}://{}{}", scheme, host, path)]
    Scheme {
        scheme: &'a str,
        host: &'a str,
        path: &'a str,
    },
    /// `[user@]host:path`, e.g. `git@github.com:owner/repo.git`.
    #[display(fmt = "{}:{}", authority, path)]
    Scp { authority: &'a str, path: &'a str },
}

impl<'a> RemoteUrl<'a> {
    pub fn parse(url: &'a str) -> Result<Self> {
        parse_remote_url::<nom::error::Error<&str>>(url)
            .map(|(_, remote_url)| remote_url)
            .map_err(|_| {
                malformed(
                    url,
                    "expected `scheme://host/path` or `[user@]host:path`",
                )
            })
    }

    pub fn host(&self) -> &'a str {
        match *self {
            Self::Scheme { host, .. } => host,
            Self::Scp { authority, .. } => authority
                .rsplit_once('@')
                .map_or(authority, |(_user, host)| host),
        }
    }

    pub fn path(&self) -> &'a str {
        match *self {
            Self::Scheme { path, .. } | Self::Scp { path, .. } => path,
        }
    }

    /// The last path segment with one trailing `.git` removed. Trailing
    /// slashes are ignored.
    pub fn repository_name(&self) -> Option<&'a str> {
        let path = self.path().trim_end_matches('/');
        let segment = path.rsplit('/').next().unwrap_or(path);
        let name = segment.strip_suffix(GIT_SUFFIX).unwrap_or(segment);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Extracts the repository name from a remote URL, e.g. `repo` from both
/// `git@host:owner/repo.git` and `https://host/owner/repo`.
pub fn repository_name(url: &str) -> Result<String> {
    let remote_url = RemoteUrl::parse(url)?;
    trace!("remote host: {:?}", remote_url.host());
    remote_url
        .repository_name()
        .map(str::to_string)
        .ok_or_else(|| malformed(url, "path has no repository name"))
}

fn malformed(url: &str, reason: &str) -> Error {
    Error::MalformedRemoteUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_remote_url<'a, E>(input: &'a str) -> IResult<&'a str, RemoteUrl<'a>, E>
where
    E: ParseError<&'a str> + ContextError<&'a str>,
{
    context("remote-url", alt((parse_scheme_url, parse_scp_url)))(input)
}

fn parse_scheme_url<'a, E>(input: &'a str) -> IResult<&'a str, RemoteUrl<'a>, E>
where
    E: ParseError<&'a str> + ContextError<&'a str>,
{
    context("scheme-url", |input: &'a str| {
        let (next_input, scheme) = parse_scheme(input)?;
        let (next_input, _separator) = tag("://")(next_input)?;
        // Empty for `file:///path`.
        let (next_input, host) = take_while(|chr: char| chr != '/')(next_input)?;
        let (next_input, path) = verify(
            take_while(|chr: char| !matches!(chr, '?' | '#')),
            |path: &str| path.starts_with('/'),
        )(next_input)?;
        // Query and fragment are not part of the repository path.
        let (next_input, _query) = rest(next_input)?;
        Ok((next_input, RemoteUrl::Scheme { scheme, host, path }))
    })(input)
}

fn parse_scheme<'a, E>(input: &'a str) -> IResult<&'a str, &'a str, E>
where
    E: ParseError<&'a str> + ContextError<&'a str>,
{
    context(
        "scheme",
        recognize(pair(
            satisfy(|chr: char| chr.is_ascii_alphabetic()),
            take_while(|chr: char| chr.is_ascii_alphanumeric() || matches!(chr, '+' | '-' | '.')),
        )),
    )(input)
}

// No `/` may appear before the `:`, otherwise it is a local path. A single
// letter before the `:` is a DOS drive, as git treats it.
fn parse_scp_url<'a, E>(input: &'a str) -> IResult<&'a str, RemoteUrl<'a>, E>
where
    E: ParseError<&'a str> + ContextError<&'a str>,
{
    context("scp-url", |input: &'a str| {
        let (next_input, authority) = verify(
            recognize(pair(
                opt(pair(take_while1(is_authority_char), char('@'))),
                take_while1(is_authority_char),
            )),
            |authority: &str| authority.chars().nth(1).is_some(),
        )(input)?;
        let (next_input, _colon) = char(':')(next_input)?;
        // `host://` without a path is a truncated scheme URL, not a path.
        let (next_input, path) = verify(rest, |path: &str| {
            !path.is_empty() && !path.starts_with("//") && !path.contains('\\')
        })(next_input)?;
        Ok((next_input, RemoteUrl::Scp { authority, path }))
    })(input)
}

fn is_authority_char(chr: char) -> bool {
    !matches!(chr, '@' | ':' | '/' | '\\')
}
