use recipebox_testing::TestWorld;
use recipebox_testing::assertions::{assert_output_contains, assert_recipe_names};

#[test]
fn test_shell_intents_share_one_store() {
    let world = TestWorld::new();
    let script = "fav 2\nsort difficulty\nlist\nstats\nquit\n";
    let result = world.run_with_stdin(&["shell"], script).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let out = result.stdout();
    assert_output_contains(out, "Recipe 2 added to favorites (3 shown)").unwrap();
    assert_output_contains(out, "Sorted by difficulty (3 shown)").unwrap();
    assert_output_contains(out, "#2 Chicken Curry [favorite]").unwrap();
    assert_output_contains(out, "Favorites:        1").unwrap();

    let easy = out.find("#3 Vegetable Stir-Fry").unwrap();
    let medium = out.find("#1 Spaghetti Bolognese").unwrap();
    let hard = out.find("#2 Chicken Curry").unwrap();
    assert!(easy < medium && medium < hard);
}

#[test]
fn test_shell_reports_errors_and_keeps_going() {
    let world = TestWorld::new();
    let script = "dance\nfav 404\nfilter maxPrepTime -1\nsearch curry\n";
    let result = world.run_with_stdin(&["shell"], script).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert_output_contains(out, "Error: unknown command 'dance'").unwrap();
    assert_output_contains(out, "Error: Not found: no recipe with id 404").unwrap();
    assert_output_contains(out, "Error: Invalid input: max prep time must not be negative").unwrap();
    assert_output_contains(out, "Searching for \"curry\" (1 shown)").unwrap();
}

#[test]
fn test_shell_reset_keeps_sort() {
    let world = TestWorld::new();
    let script = "sort rating\ncategory Asian\nfilter minRating 4\nreset\nlist\n";
    let result = world
        .run_with_stdin(&["--format", "json", "shell"], script)
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let docs = result.json_stream().unwrap();
    assert_eq!(docs.len(), 5);
    assert_eq!(docs[1]["content"]["shown"], 1);
    assert_eq!(docs[3]["content"]["message"], "Filters reset");

    let list = &docs[4];
    assert_eq!(list["content"]["sort"], "rating");
    assert_eq!(list["content"]["filters"]["category"], "All");
    assert_eq!(list["content"]["filters"]["minRating"], 0.0);
    assert_recipe_names(
        list,
        &["Chicken Curry", "Spaghetti Bolognese", "Vegetable Stir-Fry"],
    )
    .unwrap();
}

#[test]
fn test_shell_add_then_export() {
    let world = TestWorld::new();
    let script = concat!(
        r#"add {"name":"Toast","description":"Bread, but hot","ingredients":["bread"],"prepTime":"5 mins"}"#,
        "\n",
        "search toast\n",
        "export session.json\n",
    );
    let result = world
        .run_with_stdin(&["--format", "json", "shell"], script)
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let docs = result.json_stream().unwrap();
    assert_eq!(docs[0]["content"]["recipe"]["category"], "Other");
    assert_eq!(docs[1]["content"]["shown"], 1);
    assert_eq!(docs[2]["content"]["recipeCount"], 4);

    let exported: serde_json::Value =
        serde_json::from_str(&world.read_file("session.json").unwrap()).unwrap();
    assert_eq!(exported.as_array().unwrap().len(), 4);
}

#[test]
fn test_shell_json_errors_are_documents() {
    let world = TestWorld::new();
    let result = world
        .run_with_stdin(&["--format", "json", "shell"], "show 77\n")
        .unwrap();
    let docs = result.json_stream().unwrap();
    assert_eq!(docs.len(), 1);
    assert!(docs[0]["error"].as_str().unwrap().contains("Not found"));
}
