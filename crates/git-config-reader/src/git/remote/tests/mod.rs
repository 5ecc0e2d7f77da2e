use super::*;

fn assert_malformed(url: &str) {
    let result = repository_name(url);
    assert!(
        matches!(&result, Err(Error::MalformedRemoteUrl { url: u, .. }) if u == url),
        "expected malformed URL error for {:?}, got {:?}",
        url,
        result
    );
}

#[test]
fn test_repository_name_scp_with_git_suffix() {
    assert_eq!(
        repository_name("git@github.com:tcnksm/go-test-gitconfig.git").unwrap(),
        "go-test-gitconfig"
    );
}

#[test]
fn test_repository_name_https_without_git_suffix() {
    assert_eq!(repository_name("https://host/owner/repo").unwrap(), "repo");
}

#[test]
fn test_repository_name_https_with_git_suffix() {
    assert_eq!(
        repository_name("https://github.com/owner/repo.git").unwrap(),
        "repo"
    );
}

#[test]
fn test_repository_name_ssh_scheme_with_port() {
    assert_eq!(
        repository_name("ssh://git@example.com:2222/srv/git/project.git").unwrap(),
        "project"
    );
}

#[test]
fn test_repository_name_file_scheme() {
    assert_eq!(
        repository_name("file:///srv/git/project.git").unwrap(),
        "project"
    );
}

#[test]
fn test_repository_name_scp_without_directory() {
    assert_eq!(repository_name("example.com:project.git").unwrap(), "project");
}

#[test]
fn test_repository_name_ignores_trailing_slash() {
    assert_eq!(repository_name("https://host/owner/repo/").unwrap(), "repo");
}

#[test]
fn test_repository_name_strips_one_git_suffix() {
    assert_eq!(
        repository_name("https://host/owner/repo.git.git").unwrap(),
        "repo.git"
    );
}

#[test]
fn test_repository_name_keeps_inner_git() {
    assert_eq!(
        repository_name("git@host:owner/my.github.io").unwrap(),
        "my.github.io"
    );
}

#[test]
fn test_repository_name_bare_string() {
    assert_malformed("repo");
}

#[test]
fn test_repository_name_empty() {
    assert_malformed("");
}

#[test]
fn test_repository_name_local_path() {
    assert_malformed("/srv/git/project.git");
    assert_malformed("../project");
}

#[test]
fn test_repository_name_scheme_without_path() {
    assert_malformed("https://github.com");
    assert_malformed("https://github.com/");
}

#[test]
fn test_repository_name_only_suffix() {
    assert_malformed("git@host:owner/.git");
}

#[test]
fn test_parse_scheme_url() {
    let remote_url = RemoteUrl::parse("https://github.com/owner/repo.git").unwrap();
    assert_eq!(
        remote_url,
        RemoteUrl::Scheme {
            scheme: "https",
            host: "github.com",
            path: "/owner/repo.git",
        }
    );
    assert_eq!(remote_url.host(), "github.com");
}

#[test]
fn test_parse_scp_url() {
    let remote_url = RemoteUrl::parse("git@github.com:owner/repo.git").unwrap();
    assert_eq!(
        remote_url,
        RemoteUrl::Scp {
            authority: "git@github.com",
            path: "owner/repo.git",
        }
    );
    assert_eq!(remote_url.host(), "github.com");
    assert_eq!(remote_url.to_string(), "git@github.com:owner/repo.git");
}

#[test]
fn test_repository_name_dos_drive_path() {
    assert_malformed("C:\\work\\repo");
    assert_malformed("C:/work/repo");
}

#[test]
fn test_repository_name_backslash_in_scp_path() {
    assert_malformed("host:owner\\repo.git");
}

#[test]
fn test_repository_name_drops_query_and_fragment() {
    assert_eq!(repository_name("https://host/owner/repo?x=1").unwrap(), "repo");
    assert_eq!(
        repository_name("https://host/owner/repo.git#main").unwrap(),
        "repo"
    );
}

#[test]
fn test_parse_scheme_url_without_query() {
    let remote_url = RemoteUrl::parse("https://host/owner/repo?x=1").unwrap();
    assert_eq!(remote_url.path(), "/owner/repo");
}
