//! Face record parsing.
//!
//! Face lines in the wild come in several ad-hoc layouts. The layout is
//! decided once per line from the number of `/` characters it contains, and
//! each layout has its own parser. Anything the classifier does not
//! recognise contributes no triangles.

use tracing::trace;

/// Three 1-based references into a vertex (or attribute) array, as authored.
pub type IndexTriple = [i32; 3];

/// Fewest corners a plain index list may have.
pub const MIN_PLAIN_VERTICES: usize = 3;

/// Most corners a plain index list may have.
pub const MAX_PLAIN_VERTICES: usize = 9;

/// One triangle produced from a face record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTriangle {
    /// Vertex position references, in winding order
    pub indices: IndexTriple,
    /// Absolute-valued per-corner attribute references, when the layout
    /// carries them. Used to pick a texture coordinate for the face.
    pub attributes: Option<IndexTriple>,
}

/// Layout of a face record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceEncoding {
    /// `f 1 2 3 4 ...` with no separators
    PlainList,
    /// `f 1/1 2/2 3/3`
    PosAttr3,
    /// `f 1/1 2/2 3/3 4/4`
    PosAttr4,
    /// `f 1//1 2//2 3//3`, middle field empty
    PosNormal3,
    /// `f 1/1/1 2/2/2 3/3/3 4/4/4`, third field ignored
    PosAttrExtra4,
}

impl FaceEncoding {
    /// Decide the layout of a face line (without its leading `f` tag).
    pub fn classify(line: &str) -> Option<FaceEncoding> {
        match line.matches('/').count() {
            0 => Some(FaceEncoding::PlainList),
            3 => Some(FaceEncoding::PosAttr3),
            4 => Some(FaceEncoding::PosAttr4),
            6 if line.split_whitespace().all(|corner| corner.contains("//")) => {
                Some(FaceEncoding::PosNormal3)
            }
            8 => Some(FaceEncoding::PosAttrExtra4),
            _ => None,
        }
    }
}

/// Parse a face line (without its leading `f` tag) into triangles.
///
/// Never fails: unsupported layouts and unsupported corner counts yield an
/// empty list, and malformed numbers read as 0.
pub fn parse_face(line: &str) -> Vec<FaceTriangle> {
    let Some(encoding) = FaceEncoding::classify(line) else {
        trace!("Unrecognised face layout: {:?}", line.trim());
        return Vec::new();
    };

    match encoding {
        FaceEncoding::PlainList => parse_plain_list(line),
        FaceEncoding::PosAttr3 | FaceEncoding::PosNormal3 => {
            let [a, b, c] = read_corners::<3>(line);
            vec![triangle(a, b, c)]
        }
        FaceEncoding::PosAttr4 | FaceEncoding::PosAttrExtra4 => {
            let [a, b, c, d] = read_corners::<4>(line);
            vec![triangle(a, b, c), triangle(a, d, b)]
        }
    }
}

/// Plain lists are split into every triangle the nested slot scan visits,
/// not a fan. For more than four corners this produces overlapping and
/// repeated triangles.
fn parse_plain_list(line: &str) -> Vec<FaceTriangle> {
    let slots: Vec<i32> = line.split_whitespace().map(parse_int).collect();
    let n = slots.len();
    if !(MIN_PLAIN_VERTICES..=MAX_PLAIN_VERTICES).contains(&n) {
        trace!("Skipping plain face with {} corners", n);
        return Vec::new();
    }

    let mut triangles = Vec::new();
    for j in 0..n - 2 {
        for k in 1..n - 1 {
            for l in 2..n {
                if j != k && j != l && k != l {
                    triangles.push(FaceTriangle {
                        indices: [slots[j], slots[k], slots[l]],
                        attributes: None,
                    });
                }
            }
        }
    }
    triangles
}

/// A face corner: position reference and attribute reference.
#[derive(Debug, Clone, Copy, Default)]
struct Corner {
    position: i32,
    attribute: i32,
}

fn triangle(a: Corner, b: Corner, c: Corner) -> FaceTriangle {
    FaceTriangle {
        indices: [a.position, b.position, c.position],
        attributes: Some([
            a.attribute.saturating_abs(),
            b.attribute.saturating_abs(),
            c.attribute.saturating_abs(),
        ]),
    }
}

/// Read the first `N` corners. `a/b`, `a/b/c` and `a//b` all yield
/// `(a, b)`; missing corners and fields read as 0.
fn read_corners<const N: usize>(line: &str) -> [Corner; N] {
    let mut corners = [Corner::default(); N];
    for (corner, token) in corners.iter_mut().zip(line.split_whitespace()) {
        let mut fields = token.split('/').filter(|field| !field.is_empty());
        corner.position = fields.next().map(parse_int).unwrap_or(0);
        corner.attribute = fields.next().map(parse_int).unwrap_or(0);
    }
    corners
}

/// Leading integer of `token`, 0 if there is none.
fn parse_int(token: &str) -> i32 {
    let token = token.trim();
    let end = token
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(triangles: &[FaceTriangle]) -> Vec<IndexTriple> {
        triangles.iter().map(|t| t.indices).collect()
    }

    #[test]
    fn classify_layouts() {
        assert_eq!(FaceEncoding::classify(" 1 2 3"), Some(FaceEncoding::PlainList));
        assert_eq!(FaceEncoding::classify(" 1/4 2/5 3/6"), Some(FaceEncoding::PosAttr3));
        assert_eq!(FaceEncoding::classify(" 1/4 2/5 3/6 7/8"), Some(FaceEncoding::PosAttr4));
        assert_eq!(FaceEncoding::classify(" 1//4 2//5 3//6"), Some(FaceEncoding::PosNormal3));
        assert_eq!(
            FaceEncoding::classify(" 1/4/1 2/5/2 3/6/3 7/8/4"),
            Some(FaceEncoding::PosAttrExtra4)
        );
    }

    #[test]
    fn unknown_layouts_are_rejected() {
        assert_eq!(FaceEncoding::classify(" 1/2/3 4/5/6 7/8/9"), None);
        assert_eq!(FaceEncoding::classify(" 1/2 3/4"), None);
        assert!(parse_face(" 1/2/3 4/5/6 7/8/9").is_empty());
        assert!(parse_face(" 1/2 3/4").is_empty());
    }

    #[test]
    fn pos_attr_triangle() {
        let tris = parse_face(" 5/1 9/2 7/3");
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].indices, [5, 9, 7]);
        assert_eq!(tris[0].attributes, Some([1, 2, 3]));
    }

    #[test]
    fn pos_attr_quad_uses_fixed_fan() {
        let tris = parse_face(" 1/11 2/12 3/13 4/14");
        assert_eq!(indices(&tris), vec![[1, 2, 3], [1, 4, 2]]);
        assert_eq!(tris[0].attributes, Some([11, 12, 13]));
        assert_eq!(tris[1].attributes, Some([11, 14, 12]));
    }

    #[test]
    fn pos_normal_triangle() {
        let tris = parse_face(" 3//7 1//8 2//9");
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].indices, [3, 1, 2]);
        assert_eq!(tris[0].attributes, Some([7, 8, 9]));
    }

    #[test]
    fn extra_field_quad_ignores_third_field() {
        let tris = parse_face(" 1/5/100 2/6/200 3/7/300 4/8/400");
        assert_eq!(indices(&tris), vec![[1, 2, 3], [1, 4, 2]]);
        assert_eq!(tris[0].attributes, Some([5, 6, 7]));
        assert_eq!(tris[1].attributes, Some([5, 8, 6]));
    }

    #[test]
    fn empty_middle_quad_reads_position_and_last_field() {
        let tris = parse_face(" 1//5 2//6 3//7 4//8");
        assert_eq!(indices(&tris), vec![[1, 2, 3], [1, 4, 2]]);
        assert_eq!(tris[0].attributes, Some([5, 6, 7]));
    }

    #[test]
    fn attributes_are_absolute() {
        let tris = parse_face(" 1/-4 2/-5 3/6");
        assert_eq!(tris[0].attributes, Some([4, 5, 6]));
    }

    #[test]
    fn plain_triangle() {
        let tris = parse_face(" 4 5 6");
        assert_eq!(indices(&tris), vec![[4, 5, 6]]);
        assert_eq!(tris[0].attributes, None);
    }

    #[test]
    fn plain_quad_enumerates_all_slot_triples() {
        let tris = parse_face(" 10 20 30 40");
        assert_eq!(
            indices(&tris),
            vec![[10, 20, 30], [10, 20, 40], [10, 30, 40], [20, 30, 40]]
        );
    }

    #[test]
    fn plain_pentagon_includes_repeats() {
        let tris = parse_face(" 1 2 3 4 5");
        // j in 0..3, k in 1..4, l in 2..5 over distinct slots
        assert_eq!(tris.len(), 14);
        assert!(indices(&tris).contains(&[3, 2, 4]));
    }

    #[test]
    fn plain_corner_count_limits() {
        assert!(parse_face(" 1 2").is_empty());
        assert!(parse_face("").is_empty());
        assert!(!parse_face(" 1 2 3 4 5 6 7 8 9").is_empty());
        assert!(parse_face(" 1 2 3 4 5 6 7 8 9 10").is_empty());
        assert!(parse_face(" 1 2 3 4 5 6 7 8 9 10 11").is_empty());
    }

    #[test]
    fn malformed_numbers_read_as_zero() {
        let tris = parse_face(" x/1 2/y 3/3");
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].indices, [0, 2, 3]);
        assert_eq!(tris[0].attributes, Some([1, 0, 3]));

        let plain = parse_face(" 1 abc 3");
        assert_eq!(indices(&plain), vec![[1, 0, 3]]);
    }

    #[test]
    fn missing_corner_reads_as_zero() {
        // Three separators spread over two corners
        let tris = parse_face(" 1/2 3/4/5");
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].indices, [1, 3, 0]);
        assert_eq!(tris[0].attributes, Some([2, 4, 0]));
    }

    #[test]
    fn parse_int_takes_leading_digits() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("-7"), -7);
        assert_eq!(parse_int("+3"), 3);
        assert_eq!(parse_int("12abc"), 12);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("99999999999"), 0);
    }
}
