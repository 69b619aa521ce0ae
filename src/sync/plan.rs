use super::local::LocalFile;
use crate::storage::RemoteObject;
use std::collections::{BTreeMap, BTreeSet};

/// What a mirror run has to do to make the bucket match the local tree
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub uploads: Vec<LocalFile>,
    /// Keys present in the bucket but not locally
    pub deletes: Vec<String>,
    pub unchanged: usize,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty() && self.deletes.is_empty()
    }
}

/// Whether the remote copy already holds the local content
pub fn is_unchanged(local: &LocalFile, remote: &RemoteObject) -> bool {
    if local.size != remote.size {
        return false;
    }
    // multipart ETags are not content hashes; size is all there is to compare
    remote.is_multipart() || remote.etag.eq_ignore_ascii_case(&local.md5)
}

/// Reconcile local files against the bucket listing. Output is ordered by key.
pub fn plan_sync(local: Vec<LocalFile>, remote: &[RemoteObject]) -> SyncPlan {
    let remote_by_key: BTreeMap<&str, &RemoteObject> =
        remote.iter().map(|o| (o.key.as_str(), o)).collect();
    let local_keys: BTreeSet<String> = local.iter().map(|f| f.key.clone()).collect();

    let mut plan = SyncPlan::default();
    for file in local {
        match remote_by_key.get(file.key.as_str()) {
            Some(existing) if is_unchanged(&file, existing) => plan.unchanged += 1,
            _ => plan.uploads.push(file),
        }
    }
    plan.uploads.sort_by(|a, b| a.key.cmp(&b.key));

    plan.deletes = remote_by_key
        .keys()
        .filter(|key| !local_keys.contains(**key))
        .map(|key| key.to_string())
        .collect();

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn local(key: &str, size: u64, md5: &str) -> LocalFile {
        LocalFile {
            key: key.to_string(),
            path: PathBuf::from("gallery").join(key),
            size,
            md5: md5.to_string(),
        }
    }

    #[test]
    fn new_files_are_uploaded() {
        let plan = plan_sync(vec![local("a.jpeg", 3, "aaa"), local("b.jpeg", 4, "bbb")], &[]);
        let keys: Vec<&str> = plan.uploads.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["a.jpeg", "b.jpeg"]);
        assert!(plan.deletes.is_empty());
    }

    #[test]
    fn remote_only_objects_are_deleted() {
        let remote = [RemoteObject::new("c.jpeg", 1, "\"ccc\"")];
        let plan = plan_sync(vec![], &remote);
        assert_eq!(plan.deletes, ["c.jpeg"]);
        assert!(plan.uploads.is_empty());
    }

    #[test]
    fn matching_etag_and_size_is_unchanged() {
        let remote = [RemoteObject::new("a.jpeg", 3, "\"AAA\"")];
        let plan = plan_sync(vec![local("a.jpeg", 3, "aaa")], &remote);
        assert!(plan.is_empty());
        assert_eq!(plan.unchanged, 1);
    }

    #[test]
    fn changed_content_is_uploaded() {
        let remote = [
            RemoteObject::new("a.jpeg", 3, "\"old\""),
            RemoteObject::new("b.jpeg", 9, "\"bbb\""),
        ];
        let plan = plan_sync(vec![local("a.jpeg", 3, "new"), local("b.jpeg", 4, "bbb")], &remote);
        assert_eq!(plan.uploads.len(), 2);
        assert_eq!(plan.unchanged, 0);
    }

    #[test]
    fn multipart_etag_compares_size_only() {
        let remote = [RemoteObject::new("big.jpeg", 10, "\"abc123-2\"")];
        let same_size = plan_sync(vec![local("big.jpeg", 10, "zzz")], &remote);
        assert!(same_size.is_empty());

        let other_size = plan_sync(vec![local("big.jpeg", 11, "zzz")], &remote);
        assert_eq!(other_size.uploads.len(), 1);
    }
}
