// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_config(sections: usize, keys_per_section: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("[section {section}]\n"));
        for key in 0..keys_per_section {
            match key % 4 {
                0 => content.push_str(&format!("count {key}: {}\n", key * 7)),
                1 => content.push_str(&format!("ratio {key}: {}.25\n", key)),
                2 => content.push_str(&format!("label {key}: value number {key}\n")),
                _ => content.push_str(&format!(
                    "notes {key}: first part\n  continued here\n  and here\n"
                )),
            }
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_config() -> String {
    generate_config(500, 40)
}
