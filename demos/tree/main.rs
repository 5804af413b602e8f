//! Prints the scene/node hierarchy of a `.gltf` or `.glb` file.
//!
//! ```text
//! gltf-tree path/to/model.gltf
//! ```

use gltf::json::scene::Node;
use gltf::Asset;

fn print_tree(asset: &Asset, node: &Node, index: usize, depth: usize) {
    println!(
        "{}- Node {} ({})",
        "  ".repeat(depth),
        index,
        node.name.as_deref().unwrap_or("<Unnamed>")
    );
    if let Some(children) = &node.children {
        for child in children {
            let child_index = child.value();
            if let Some(child_node) = asset.get(*child) {
                print_tree(asset, child_node, child_index, depth + 1);
            }
        }
    }
}

fn run(path: &str) -> Result<(), gltf::ParseError> {
    let (asset, diagnostics) = gltf::parse(path, &gltf::ParseOptions::default())?;
    for line in diagnostics.lines() {
        eprintln!("{line}");
    }
    for (scene_index, scene) in asset.scenes.iter().enumerate() {
        println!(
            "Scene {} ({})",
            scene_index,
            scene.name.as_deref().unwrap_or("<Unnamed>")
        );
        for root in &scene.nodes {
            let root_index = root.value();
            if let Some(node) = asset.get(*root) {
                print_tree(&asset, node, root_index, 1);
            }
        }
    }
    Ok(())
}

fn main() {
    match std::env::args().nth(1) {
        Some(path) => {
            if let Err(error) = run(&path) {
                eprintln!("error: {error}");
                std::process::exit(1);
            }
        }
        None => println!("usage: gltf-tree <FILE>"),
    }
}
