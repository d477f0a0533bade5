use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use cvtex::Config;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn sections_are_joined_in_file_name_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "02_summary.txt", "# Summary\nBuilds things.");
    write(&dir, "01_info.yaml", "personal_information:\n  name: Jane Doe\n");

    let body = cvtex::assemble_sections(dir.path()).unwrap();
    assert_eq!(
        body,
        "\\section{Personal Information}\n\
         \\textbf{Name:} Jane Doe\\\\\n\n\
         \\section{Summary}\n\
         Builds things.\\\\"
    );
}

#[test]
fn unsupported_and_broken_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(&dir, "01_bad.yaml", "key: [unclosed");
    write(&dir, "02_notes.txt", "# Notes");
    write(&dir, "03_image.png", "not latex");

    let body = cvtex::assemble_sections(dir.path()).unwrap();
    assert_eq!(body, "\\section{Notes}");
}

#[test]
fn tex_files_pass_through_untouched() {
    let dir = TempDir::new().unwrap();
    write(&dir, "01_custom.tex", "\\vspace{2em}\n");
    write(&dir, "02_more.md", "## More");

    let body = cvtex::assemble_sections(dir.path()).unwrap();
    assert_eq!(body, "\\vspace{2em}\n\n\\subsection{More}");
}

#[test]
fn missing_directory_is_a_hard_error() {
    let err = cvtex::assemble_sections(Path::new("/nonexistent/sections")).unwrap_err();
    assert!(matches!(err, cvtex::Error::NotFound(_)));
}

#[test]
fn convert_file_dispatches_by_extension() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.txt", "Name: Jane");
    write(&dir, "b.md", "**bold**");

    let txt = cvtex::convert_file(&dir.path().join("a.txt")).unwrap().unwrap();
    assert_eq!(txt, "\\textbf{Name:} Jane\\\\");

    let md = cvtex::convert_file(&dir.path().join("b.md")).unwrap().unwrap();
    assert_eq!(md, "\\textbf{bold}");

    let missing = cvtex::convert_file(&dir.path().join("gone.txt"));
    assert!(matches!(missing, Err(cvtex::Error::NotFound(_))));
}

#[test]
fn build_document_wraps_and_polishes() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "01_info.yaml",
        "personal_information:\n  name: Jane Doe\n  location: Springfield\n  email: jane@example.com\n",
    );
    write(&dir, "02_xp.txt", "# Experience\n- built a parser");

    let document = cvtex::build_document(dir.path(), &Config::default()).unwrap();

    assert!(document.starts_with("\\documentclass[11pt,a4paper]{article}"));
    assert!(document.ends_with("\\end{document}\n"));

    // contact section became the centered header
    assert!(document.contains("\\begin{center}"));
    assert!(document.contains("{\\LARGE\\textbf{Jane Doe}}\\\\"));
    assert!(!document.contains("\\section*{Personal Information}"));

    // remaining sections are unnumbered
    assert!(document.contains("\\section*{Experience}"));
    assert!(document.contains("\\begin{itemize}\n\\item built a parser\n\\end{itemize}"));
}

#[test]
fn bare_urls_in_sections_end_up_clickable() {
    let dir = TempDir::new().unwrap();
    write(&dir, "links.yaml", "links:\n  github: https://github.com/jane\n");

    let document = cvtex::build_document(dir.path(), &Config::default()).unwrap();
    // the escaper wrapped it in \url, so the polish pass left it alone
    assert!(document.contains("\\url{https://github.com/jane}"));
    assert!(!document.contains("\\href{https://github.com/jane}{\\url"));
}
