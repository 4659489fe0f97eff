//! # Tagtree macros
//!
//! Compile-time outlines for Tagtree.
//!
//! `markup!` accepts the same grammar as `tagtree::outline` and expands to
//! nested builder calls, so a malformed outline is a compile error rather
//! than a runtime one.
//!
//! ```
//! use tagtree_macros::markup;
//!
//! let table = markup! {
//!     table {
//!         tr { td {} }
//!         tr { td; }
//!     }
//! };
//!
//! assert_eq!(
//!     table.render(),
//!     "<table><tr><td></td></tr><tr><td></td></tr></table>"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, LitStr};
use tagtree::OutlineNode;

/// Build a `tagtree::Element` from an outline.
///
/// The root expands to `tagtree::create_root` and every nested tag to a
/// `tagtree::child` call inside its parent's configure closure.
#[proc_macro]
pub fn markup(input: TokenStream) -> TokenStream {
    let root = parse_macro_input!(input as OutlineNode);
    expand_root(&root).into()
}

fn expand_root(root: &OutlineNode) -> TokenStream2 {
    let name = LitStr::new(&root.name, root.span);
    let children = root.children.iter().map(expand_child);

    quote! {
        ::tagtree::create_root(#name, |__element: &mut ::tagtree::Element| {
            #(#children)*
        })
    }
}

fn expand_child(node: &OutlineNode) -> TokenStream2 {
    let name = LitStr::new(&node.name, node.span);
    let children = node.children.iter().map(expand_child);

    quote! {
        ::tagtree::child(__element, #name, |__element: &mut ::tagtree::Element| {
            #(#children)*
        });
    }
}
