//! Fixed text blocks of a GtkSourceView language file.

/// Body of the license comment opening every generated file.
pub fn license_comment(authors: &str, year: i32) -> String {
    format!(
        r"

 This file is part of GtkSourceView

 Authors: {authors}
 Copyright (C) {year} {authors}

 GtkSourceView is free software; you can redistribute it and/or
 modify it under the terms of the GNU Lesser General Public
 License as published by the Free Software Foundation; either
 version 2.1 of the License, or (at your option) any later version.

 GtkSourceView is distributed in the hope that it will be useful,
 but WITHOUT ANY WARRANTY; without even the implied warranty of
 MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 Lesser General Public License for more details.

 You should have received a copy of the GNU Lesser General Public
 License along with this library; if not, write to the Free Software
 Foundation, Inc., 51 Franklin St, Fifth Floor, Boston, MA  02110-1301  USA

"
    )
}

/// Body of the provenance comment.
pub fn generator_comment(source: &str, tool: &str) -> String {
    format!(" Automatically generated from {source} using {tool}. Do not edit! ")
}

/// Display name of a language: its id with the first letter upper-cased.
pub fn display_name(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("uclid"), "Uclid");
        assert_eq!(display_name("Demo"), "Demo");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_license_mentions_authors_and_year() {
        let text = license_comment("A and B", 2018);
        assert!(text.contains(" Authors: A and B\n"));
        assert!(text.contains(" Copyright (C) 2018 A and B\n"));
        assert!(!text.contains("--"));
    }
}
