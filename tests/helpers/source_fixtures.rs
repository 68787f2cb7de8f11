//! Common vim syntax fixtures for tests.
#![allow(dead_code)]

/// A uclid5 syntax file in the shape the converter was written for.
pub const UCLID_VIM: &str = r#"" Vim syntax file
" Language: uclid
" Maintainer: Jane Doe <jane@example.com>
" Filenames: *.ucl
" Latest Revision: 2018

if exists("b:current_syntax")
  finish
endif

syn keyword ucl4Decl module init next control procedure function input output var const type
syn keyword ucl4Conditional if else case esac
syn keyword ucl4Type integer boolean enum record
syn keyword ucl4Constant true false
syn keyword ucl4Identifier forall exists
syn match ucl4Number display "\<\d\+\>"
syn match ucl4BVType "\<bv\d\+\>"
syn match ucl4Generic "<\w\+>"
syn match ucl4TrailingComment "//.*"
syn region ucl4MultilineComment start="/\*" end="\*/"
syn region ucl4String start="'" end="'"

hi def link ucl4Decl Keyword
hi def link ucl4Conditional Conditional
hi def link ucl4Type Type
hi def link ucl4BVType ucl4Type
hi def link ucl4Constant Constant
hi def link ucl4Identifier Identifier
hi def link ucl4Number Number
hi def link ucl4Generic Special
hi def link ucl4TrailingComment ucl4MultilineComment
hi def link ucl4MultilineComment comment
hi def link ucl4String Constant

let b:current_syntax = "uclid"
"#;

/// The smallest input that renders: metadata, one keyword, one link.
pub const DEMO_VIM: &str = r#"" Language: demo
" Maintainer: Jane Doe
" Filenames: *.demo
syn keyword kw1 if else
hi def link kw1 Keyword
"#;

/// A link chain that never reaches a style.
pub const CYCLIC_VIM: &str = r#"" Language: loop
" Maintainer: Jane Doe
" Filenames: *.loop
syn keyword loopKw a
hi def link loopKw loopA
hi def link loopA loopB
hi def link loopB loopKw
"#;

/// A match without closing quote on line 5.
pub const MALFORMED_VIM: &str = r#"" Language: bad
" Maintainer: Jane Doe
" Filenames: *.bad
syn keyword badKw a
syn match badNum "\d\+
"#;
