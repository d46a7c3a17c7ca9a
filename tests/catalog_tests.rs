use n8n_workflows_mcp::catalog;
use serde_json::json;

#[test]
fn test_three_tools_in_stable_order() {
    let tools = catalog::tools();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(
        names,
        ["search_repositories", "get_file_contents", "search_code"]
    );

    // The catalog is a constant: a second call yields the same sequence.
    let again: Vec<String> = catalog::tools()
        .iter()
        .map(|t| t.name.to_string())
        .collect();
    assert_eq!(again, names);
}

#[test]
fn test_search_repositories_schema() {
    let tools = catalog::tools();
    let tool = tools
        .iter()
        .find(|t| t.name == "search_repositories")
        .unwrap();

    let schema = &tool.input_schema;
    assert_eq!(schema["type"], json!("object"));

    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("query"));
    assert!(properties.contains_key("perPage"));
    assert!(properties.contains_key("page"));

    let required = schema["required"].as_array().unwrap();
    assert_eq!(required, &vec![json!("query")]);
}

#[test]
fn test_get_file_contents_schema() {
    let tools = catalog::tools();
    let tool = tools.iter().find(|t| t.name == "get_file_contents").unwrap();

    let properties = tool.input_schema["properties"].as_object().unwrap();
    for key in ["owner", "repo", "path", "branch"] {
        assert!(properties.contains_key(key), "missing property {key}");
    }

    let required = tool.input_schema["required"].as_array().unwrap();
    assert_eq!(required, &vec![json!("path")]);
}

#[test]
fn test_search_code_schema() {
    let tools = catalog::tools();
    let tool = tools.iter().find(|t| t.name == "search_code").unwrap();

    let properties = tool.input_schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("q"));
    assert!(properties.contains_key("per_page"));
    assert!(properties.contains_key("page"));

    let required = tool.input_schema["required"].as_array().unwrap();
    assert_eq!(required, &vec![json!("q")]);
}

#[test]
fn test_descriptions_are_present() {
    for tool in catalog::tools() {
        let description = tool.description.as_deref().unwrap_or_default();
        assert!(!description.is_empty(), "{} has no description", tool.name);
    }
}
