use std::{collections::HashSet, path::Path};

use log::debug;

use crate::types::CompletionRecord;

const ASSIGNMENT_1_DIRS: [&str; 4] = ["01", "bai1", "b1", "l1"];
const ASSIGNMENT_2_DIRS: [&str; 4] = ["02", "bai2", "b2", "l2"];

// A Hardhat project at the member root counts as assignment 2.
const ROOT_PROJECT_MARKERS: [&str; 2] = ["hardhat.config.ts", "package.json"];

/// Returns (has_assignment_1, has_assignment_2) for one member directory.
pub fn check_assignment_completion(member_dir: &Path) -> (bool, bool) {
    if !member_dir.is_dir() {
        return (false, false);
    }
    let subdirs = match list_subdirs(member_dir) {
        Ok(subdirs) => subdirs,
        Err(e) => {
            debug!("Failed to read {}: {}", member_dir.display(), e);
            return (false, false);
        }
    };

    let has_assignment_1 = ASSIGNMENT_1_DIRS.iter().any(|d| subdirs.contains(*d));
    let mut has_assignment_2 = ASSIGNMENT_2_DIRS.iter().any(|d| subdirs.contains(*d));

    if !has_assignment_1
        && !has_assignment_2
        && ROOT_PROJECT_MARKERS
            .iter()
            .any(|marker| member_dir.join(marker).exists())
    {
        debug!("{}: project at member root", member_dir.display());
        has_assignment_2 = true;
    }

    (has_assignment_1, has_assignment_2)
}

pub fn detect_member(members_dir: &Path, member: &str) -> CompletionRecord {
    let (assignment_1, assignment_2) = check_assignment_completion(&members_dir.join(member));
    debug!("{}: assignment 1 = {}, assignment 2 = {}", member, assignment_1, assignment_2);
    CompletionRecord {
        name: member.to_string(),
        assignment_1,
        assignment_2,
    }
}

fn list_subdirs(dir: &Path) -> std::io::Result<HashSet<String>> {
    let mut subdirs = HashSet::new();
    for entry in dir.read_dir()?.flatten() {
        if entry.path().is_dir() {
            subdirs.insert(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(subdirs)
}
