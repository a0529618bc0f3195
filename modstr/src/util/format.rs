use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

/// Formats the terms of a linear combination, e.g. `2x - y`.
pub fn lc<X, R, S>(mut terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: Iterator<Item = (X, R)>
{ 
    let mut res: Vec<String> = vec![];
    
    if let Some((x, r)) = terms.next() {
        let r = paren_expr(r);
        let x = x.to_string();

        let term = if r == "1" { 
            x
        } else if r == "-1" { 
            format!("-{x}")
        } else { 
            format!("{r}{x}")
        };

        res.push(term)
    } else { 
        return String::from("0")
    };

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ("-", r.to_owned()) 
        } else { 
            ("+", r)
        };

        let term = if r == "1" { 
            x
        } else { 
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    res.join(" ")
}

fn script(i: isize, minus: char, digit: fn(u32) -> char) -> String { 
    let mut res = String::new();
    if i < 0 { 
        res.push(minus);
    }
    for d in i.unsigned_abs().to_string().chars() { 
        let d = d as u32 - '0' as u32;
        res.push(digit(d));
    }
    res
}

pub fn subscript(i: isize) -> String {
    script(i, '\u{208B}', |d| 
        char::from_u32(0x2080 + d).unwrap_or('?')
    )
}

pub fn superscript(i: isize) -> String {
    script(i, '\u{207B}', |d| match d { 
        1 => '\u{00B9}',
        2 => '\u{00B2}',
        3 => '\u{00B3}',
        _ => char::from_u32(0x2070 + d).unwrap_or('?')
    })
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn paren() { 
        assert_eq!(paren_expr("x"), "x");
        assert_eq!(paren_expr("x + y"), "(x + y)");
    }

    #[test]
    fn lc_terms() { 
        assert_eq!(lc(Vec::<(&str, i32)>::new().into_iter()), "0");
        assert_eq!(lc([("x", 1), ("y", -1)].into_iter()), "x - y");
        assert_eq!(lc([("x", -2), ("y", 3)].into_iter()), "-2x + 3y");
    }

    #[test]
    fn sub() { 
        assert_eq!(subscript(0), "₀");
        assert_eq!(subscript(1234567890), "₁₂₃₄₅₆₇₈₉₀");
        assert_eq!(subscript(-12), "₋₁₂");
    }

    #[test]
    fn sup() { 
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(1234567890), "¹²³⁴⁵⁶⁷⁸⁹⁰");
        assert_eq!(superscript(-12), "⁻¹²");
    }
}
