use std::collections::HashMap;

use petgraph::Direction::{Incoming, Outgoing};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::DfsPostOrder;
use puzzle_kit::parsing::{parse_input_lines, parse_with_context};
use puzzle_kit::runner::puzzle_runner;
use puzzle_kit::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[puzzle_runner(
    title = "Day 7: No Space Left On Device",
    parsed = FileSystem,
    part_one = Day07,
    part_two = Day07,
    answer_one = "1845346",
    answer_two = "3636703"
)]
impl super::AdventOfCode2022<7> {}

#[derive(thiserror::Error, Debug)]
enum TerminalError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("expected \"dir <name>\" or \"<size> <name>\" in a listing, found {0:?}")]
    InvalidListing(String),

    #[error("the root directory has no parent")]
    AboveRoot,

    #[error("disk of {disk} can't hold the {used} in use")]
    OverfullDisk { disk: FileSize, used: FileSize },

    #[error("no directory frees enough space")]
    NothingToDelete,
}

/*
Input is a terminal log browsing a file system. Lines starting with `$` are commands:
- `cd /` moves to the root directory, `cd ..` to the parent, `cd <name>` into a child.
- `ls` lists the current directory. Following lines are its entries, either `dir <name>` or
  `<size> <name>` for a file.

Directories form a tree rooted at `/`, stored as a graph with edges from parent to child.
*/

type FileSize = u64;

#[derive(Debug, Default)]
struct Directory {
    name: String,
    /// Sizes of files directly in this directory, by file name.
    files: HashMap<String, FileSize>,
}

struct FileSystem {
    tree: DiGraph<Directory, ()>,
    root: NodeIndex,
}

impl FileSystem {
    fn new() -> Self {
        let mut tree = DiGraph::new();
        let root = tree.add_node(Directory {
            name: "/".to_owned(),
            ..Directory::default()
        });
        Self { tree, root }
    }

    fn parent(&self, directory: NodeIndex) -> Option<NodeIndex> {
        self.tree.neighbors_directed(directory, Incoming).next()
    }

    /// Find a child directory by name, adding it if it isn't known yet.
    fn child(&mut self, directory: NodeIndex, name: &str) -> NodeIndex {
        let existing = self
            .tree
            .neighbors_directed(directory, Outgoing)
            .find(|&child| self.tree[child].name == name);
        existing.unwrap_or_else(|| {
            let child = self.tree.add_node(Directory {
                name: name.to_owned(),
                ..Directory::default()
            });
            self.tree.add_edge(directory, child, ());
            child
        })
    }

    /// The total size of every directory, including nested directories, indexed by node.
    fn total_sizes(&self) -> Vec<FileSize> {
        let mut totals = vec![0; self.tree.node_count()];
        // children are visited before their parent
        let mut dfs = DfsPostOrder::new(&self.tree, self.root);
        while let Some(directory) = dfs.next(&self.tree) {
            let own: FileSize = self.tree[directory].files.values().sum();
            let nested: FileSize = self
                .tree
                .neighbors_directed(directory, Outgoing)
                .map(|child| totals[child.index()])
                .sum();
            totals[directory.index()] = own + nested;
        }
        totals
    }
}

impl ParseData for FileSystem {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut file_system = Self::new();
        let mut current = file_system.root;

        parse_input_lines(input, |_, line| -> DynamicResult<()> {
            let line = line.trim();
            if let Some(command) = line.strip_prefix("$ ") {
                match command.split_once(' ') {
                    Some(("cd", "/")) => current = file_system.root,
                    Some(("cd", "..")) => {
                        current = file_system
                            .parent(current)
                            .ok_or(TerminalError::AboveRoot)?;
                    }
                    Some(("cd", name)) => current = file_system.child(current, name),
                    None if command == "ls" => {}
                    _ => return Err(TerminalError::UnknownCommand(command.to_owned()).into()),
                }
            } else if let Some(name) = line.strip_prefix("dir ") {
                file_system.child(current, name);
            } else {
                let (size, name) = line
                    .split_once(' ')
                    .ok_or_else(|| TerminalError::InvalidListing(line.to_owned()))?;
                let size: FileSize = parse_with_context(size)?;
                // listing a directory again doesn't add its files twice
                file_system.tree[current]
                    .files
                    .insert(name.to_owned(), size);
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        tracing::debug!(
            directories = file_system.tree.node_count(),
            "built directory tree"
        );
        Ok(file_system)
    }
}

/*
For part 1, sum the total sizes of directories with a total size of at most 100000. Nested
directories count toward each of their ancestors.
*/

const SMALL_DIRECTORY_LIMIT: FileSize = 100_000;

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = FileSystem;
    type Output = FileSize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .total_sizes()
            .into_iter()
            .filter(|&size| size <= SMALL_DIRECTORY_LIMIT)
            .sum())
    }
}

/*
For part 2, the disk holds 70000000 and an update needs 30000000 unused. Find the smallest directory
that frees enough space when deleted, and report its total size.
*/

const DISK_SIZE: FileSize = 70_000_000;
const NEEDED_UNUSED: FileSize = 30_000_000;

impl Solution<PartTwo> for Day07 {
    type Input = FileSystem;
    type Output = FileSize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let totals = input.total_sizes();
        let used = totals[input.root.index()];
        let unused = DISK_SIZE
            .checked_sub(used)
            .ok_or(TerminalError::OverfullDisk {
                disk: DISK_SIZE,
                used,
            })?;
        let to_free = NEEDED_UNUSED.saturating_sub(unused);

        let smallest = totals
            .into_iter()
            .filter(|&size| size >= to_free)
            .min()
            .ok_or(TerminalError::NothingToDelete)?;
        Ok(smallest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = FileSystem::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day07 as Solution<PartOne>>::solve(&parsed)?, 95437);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = FileSystem::parse(EXAMPLE_INPUT)?;
        assert_eq!(<Day07 as Solution<PartTwo>>::solve(&parsed)?, 24_933_642);
        Ok(())
    }

    #[test]
    fn leaving_root_is_an_error() {
        assert!(FileSystem::parse("$ cd /\n$ cd ..\n").is_err());
    }
}
