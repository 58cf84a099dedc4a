#![allow(dead_code)]

pub mod file;

/// Line of `output` that renders the folder called `name`
pub fn line_of<'a>(output: &'a str, name: &str) -> &'a str {
    let marker = format!("|-- {name}");
    output
        .lines()
        .find(|line| {
            line.trim_start()
                .strip_prefix(&marker)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
        })
        .unwrap_or_else(|| panic!("no line for {name} in:\n{output}"))
}
