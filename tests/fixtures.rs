use pulldown_cmark_latex::{Options, markdown_to_latex};
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};

fn collect_md_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let p = entry.unwrap().path();
        if p.is_dir() {
            collect_md_files(&p, out);
        } else if p.extension().is_some_and(|ext| ext == "md") {
            out.push(p);
        }
    }
}

#[test]
fn fixtures_match_expected_latex() {
    let mut files = Vec::new();
    collect_md_files(Path::new("tests/fixtures"), &mut files);
    assert!(!files.is_empty(), "no fixture files found");

    for f in files {
        let md = fs::read_to_string(&f).unwrap();
        let expected = fs::read_to_string(f.with_extension("tex")).unwrap();
        let actual = markdown_to_latex(&md, &Options::default()).unwrap().latex;

        if actual != expected {
            let diff = TextDiff::from_lines(&expected, &actual);
            eprintln!("LaTeX diff for {:?}:\n", f);
            for op in diff.ops() {
                for change in diff.iter_changes(op) {
                    match change.tag() {
                        ChangeTag::Delete => eprint!("- {}", change),
                        ChangeTag::Insert => eprint!("+ {}", change),
                        ChangeTag::Equal => eprint!("  {}", change),
                    }
                }
            }
            eprintln!();
        }
        assert_eq!(actual, expected, "output mismatch for {:?}", f);
    }
}
