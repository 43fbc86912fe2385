#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature};
use tempfile::TempDir;

/// Temporary repository with a linear history.
///
/// ```text
/// c1 (v1.0) - c2 [origin/stable] - c3 (v1.1M) - c4 [origin/master] - c5 [HEAD]
/// ```
pub struct Fixture {
    pub dir: TempDir,
    pub repo: Repository,
    pub commits: Vec<Oid>,
}

impl Fixture {
    pub fn short(&self, index: usize) -> String {
        format!("g{}", &self.commits[index].to_string()[..7])
    }
}

pub fn commit(repo: &Repository, message: &str) -> Oid {
    let sig = Signature::now("Test User", "test@example.com").expect("Could not create signature");
    let tree_id = repo
        .index()
        .expect("Could not get index")
        .write_tree()
        .expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    let parents: Vec<Commit> = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().expect("HEAD is not a commit")],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&Commit> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .expect("Could not create commit")
}

pub fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Could not create tag");
}

pub fn remote_branch(repo: &Repository, remote: &str, branch: &str, oid: Oid) {
    repo.reference(
        &format!("refs/remotes/{}/{}", remote, branch),
        oid,
        true,
        "test fixture",
    )
    .expect("Could not create remote-tracking ref");
}

pub fn setup_test_repo() -> Fixture {
    let dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(dir.path()).expect("Could not init git repo");

    let mut commits = Vec::new();
    for i in 1..=5 {
        commits.push(commit(&repo, &format!("commit {}", i)));
    }

    tag(&repo, "v1.0", commits[0]);
    tag(&repo, "v1.1M", commits[2]);
    remote_branch(&repo, "origin", "stable", commits[1]);
    remote_branch(&repo, "origin", "master", commits[3]);

    Fixture { dir, repo, commits }
}
