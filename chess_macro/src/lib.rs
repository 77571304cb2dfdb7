extern crate proc_macro;
use proc_macro::{TokenStream, TokenTree};

/// Generates the `Rank`, `File` and `Square` enums.
///
/// `Square` variants are emitted rank-major from the eighth rank down to the
/// first, files a to h within each rank, so `Square::A8 as u8 == 0` and
/// `Square::H1 as u8 == 63`.
#[proc_macro]
pub fn make_ranks_files_squares(_: TokenStream) -> TokenStream {
    let ranks = (
        "Rank",
        [
            "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth",
        ]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>(),
    );

    let files = (
        "File",
        ["A", "B", "C", "D", "E", "F", "G", "H"]
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>(),
    );
    let squares = (
        "Square",
        (1..=ranks.1.len())
            .rev()
            .flat_map(|rank| files.1.iter().map(move |f| format!("{f}{rank}")))
            .collect::<Vec<String>>(),
    );

    let ranks_code = create_enum_and_impl(ranks.0, ranks.1);
    let files_code = create_enum_and_impl(files.0, files.1);
    let squares_code = create_enum_and_impl(squares.0, squares.1);

    let output = format!("{}\n{}\n{}\n", ranks_code, files_code, squares_code);
    output.parse().expect("Output code is valid")
}

fn create_enum_and_impl(name: &str, variants: Vec<String>) -> String {
    let mut code = format!(
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n#[repr(u8)]\npub enum {name} {{"
    );
    for v in &variants {
        code += &format!("{v},")
    }
    code += "}";

    code += &format!(
        "
        impl {name} {{
            pub const ALL: [Self; {}] = [{}];
            pub const fn from_u8_checked(input: u8) -> Option<Self> {{
                match input {{
                    {}
                    _ => None
                }}
            }}
            pub const fn from_u8(input: u8) -> Self {{
                if let Some(v) = Self::from_u8_checked(input) {{
                    v
                }} else {{
                    panic!(\"from_u8 of {name} out of range\")
                }}
            }}
        }}
    ",
        variants.len(),
        variants.iter().fold(String::new(), |mut acc, v| {
            acc += &format!("Self::{v},");
            acc
        }),
        variants
            .iter()
            .enumerate()
            .fold(String::new(), |mut acc, (i, v)| {
                acc += &format!("{i} => Some(Self::{v}),");
                acc
            })
    );

    code
}

/// Builds a `Bitboard` from an 8x8 diagram of `X` (set) and `.` (clear).
///
/// The diagram is read the way a board is printed: eighth rank on top, a-file
/// on the left. The first token therefore maps to bit 0 (a8).
#[proc_macro]
pub fn make_bitboard(tokens: TokenStream) -> TokenStream {
    let mut bb: u64 = 0;

    let mut tokens = tokens.into_iter();

    for idx in 0..64u32 {
        let t = tokens.next().expect("Should have a token for each square");
        match t {
            TokenTree::Ident(l) => {
                let s = l.to_string();
                match s.as_str() {
                    "X" => bb |= 1 << idx,
                    s => panic!("Cannot use Ident '{s}' in make_bitboard!"),
                }
            }
            TokenTree::Punct(p) => {
                let s = p.to_string();
                match s.as_str() {
                    "." => {}
                    s => panic!("Cannot use Punct '{s}' in make_bitboard!"),
                }
            }
            s => panic!("Cannot use TokenTree '{:?}' in make_bitboard!", s),
        }
    }
    if let Some(extra) = tokens.next() {
        panic!("make_bitboard! takes exactly 64 squares, found extra '{extra}'");
    }

    format!("Bitboard({}u64)", bb)
        .parse()
        .expect("Output of make_bitboard! should be valid")
}
