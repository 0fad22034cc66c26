use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use jinja_loader::{
    current_renderer, load_template, render_with, set_renderer, set_template_directory,
    template_directory, Error, Renderer, RendererConfig, DEFAULT_TEMPLATE_DIRECTORY,
};
use serial_test::serial;
use tempfile::TempDir;

fn write_templates(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn greet(name: &'static str) -> HashMap<&'static str, &'static str> {
    HashMap::from([("name", name)])
}

#[test]
#[serial]
fn test_default_directory_from_working_directory() {
    let root = TempDir::new().unwrap();
    write_templates(&root.path().join("templates"), &[("greet.html", "Hi {{name}}!")]);

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(root.path()).unwrap();
    set_template_directory(DEFAULT_TEMPLATE_DIRECTORY);

    let handler = load_template("greet.html").wrap(|_: ()| Ok::<_, Error>(greet("Ada")));
    let rendered = handler(());

    std::env::set_current_dir(previous).unwrap();
    assert_eq!(template_directory(), PathBuf::from("templates"));
    assert_eq!(rendered.unwrap(), "Hi Ada!");
}

#[test]
#[serial]
fn test_directory_change_applies_to_wrapped_handlers() {
    let old = TempDir::new().unwrap();
    let new = TempDir::new().unwrap();
    write_templates(old.path(), &[("old.txt", "old {{ name }}")]);
    write_templates(new.path(), &[("new.txt", "new {{ name }}")]);

    set_template_directory(old.path());
    let old_page = load_template("old.txt").wrap(|_: ()| Ok::<_, Error>(greet("a")));
    let new_page = load_template("new.txt").wrap(|_: ()| Ok::<_, Error>(greet("b")));

    assert_eq!(old_page(()).unwrap(), "old a");
    assert!(matches!(new_page(()), Err(Error::TemplateNotFound { .. })));

    set_template_directory(new.path());
    assert_eq!(template_directory(), new.path());
    assert_eq!(new_page(()).unwrap(), "new b");
    match old_page(()).unwrap_err() {
        Error::TemplateNotFound { name, directory } => {
            assert_eq!(name, "old.txt");
            assert_eq!(directory, new.path());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_render_with_ignores_global_changes() {
    let pinned = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    write_templates(pinned.path(), &[("page.txt", "pinned {{ name }}")]);

    let page = render_with("page.txt", Arc::new(Renderer::new(pinned.path())))
        .wrap(|_: ()| Ok::<_, Error>(greet("x")));

    set_template_directory(other.path());
    assert_eq!(page(()).unwrap(), "pinned x");
}

#[test]
#[serial]
fn test_snapshot_survives_replacement() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_templates(first.path(), &[("page.txt", "first")]);

    set_template_directory(first.path());
    let snapshot = current_renderer();
    set_template_directory(second.path());

    assert_eq!(snapshot.render("page.txt", &()).unwrap(), "first");
    assert_eq!(current_renderer().directory(), second.path());
}

#[test]
#[serial]
fn test_set_renderer_installs_config() {
    let dir = TempDir::new().unwrap();
    write_templates(dir.path(), &[("hello.txt", "Hello {{ name }}")]);

    set_renderer(Renderer::with_config(
        RendererConfig::new(dir.path()).with_strict_undefined(true),
    ));
    assert!(current_renderer().config().strict_undefined);

    let missing_name = load_template("hello.txt").wrap(|_: ()| Ok::<_, Error>(()));
    assert!(matches!(missing_name(()), Err(Error::Render { .. })));

    set_template_directory(dir.path());
    assert!(!current_renderer().config().strict_undefined);
    assert_eq!(missing_name(()).unwrap(), "Hello ");
}

#[tokio::test]
#[serial]
async fn test_async_handler_uses_current_directory() {
    let dir = TempDir::new().unwrap();
    write_templates(dir.path(), &[("greet.html", "Hi {{name}}!")]);
    set_template_directory(dir.path());

    let handler = load_template("greet.html")
        .wrap_async(|name: &'static str| async move { Ok::<_, Error>(greet(name)) });
    assert_eq!(handler("Ada").await.unwrap(), "Hi Ada!");
}
