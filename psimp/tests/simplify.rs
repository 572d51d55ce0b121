use itertools::Itertools;
use psimp::{simplify, tokenize, Error, Poly, VarKey};

fn init_logger() { 
    use psimp::util::log::init_simple_logger;
    // may already be installed by another test in this binary.
    let _ = init_simple_logger(log::LevelFilter::Debug);
}

// joins signed terms back into a sum.
fn join(terms: &[&str]) -> String { 
    terms.iter().enumerate().map(|(i, t)| 
        if i == 0 || t.starts_with('-') { 
            t.to_string()
        } else { 
            format!("+{t}")
        }
    ).join("")
}

#[test]
fn examples() { 
    init_logger();

    assert_eq!(simplify("").unwrap(), "");
    assert_eq!(simplify("a+a").unwrap(), "2a");
    assert_eq!(simplify("a-a").unwrap(), "");
    assert_eq!(simplify("1a+b").unwrap(), "a+b");
    assert_eq!(simplify("a+b-b").unwrap(), "a");
    assert_eq!(simplify("dc+3ac-ba+bc").unwrap(), "-ab+3ac+bc+cd");
    assert_eq!(simplify("2xy-zy").unwrap(), "2xy-yz");
    assert_eq!(simplify("-a+5ab+3a-c-2a").unwrap(), "-c+5ab");
    assert_eq!(simplify("-abc+3a+2ac").unwrap(), "3a+2ac-abc");
    assert_eq!(simplify("xyz-xz").unwrap(), "-xz+xyz");
    assert_eq!(simplify("a+ca-ab").unwrap(), "a-ab+ac");
    assert_eq!(simplify("xzy+zby").unwrap(), "byz+xyz");
    assert_eq!(simplify("-y+x").unwrap(), "x-y");
    assert_eq!(simplify("y-x").unwrap(), "-x+y");
    assert_eq!(simplify("3a+b+4ac+bc-ab+3a-cb-a-a").unwrap(), "4a+b-ab+4ac");
    assert_eq!(simplify("+n-5hn+7tf-4fn+8hn+9fn").unwrap(), "n+5fn+7ft+3hn");
}

#[test]
fn twelve_becomes_two() { 
    init_logger();

    let p: Poly = "4ab+8ba".parse().unwrap();
    assert_eq!(p.coeff(&VarKey::from("ab")), 12);
    assert_eq!(p.to_string(), "2ab");
}

#[test]
fn malformed_term_propagates() { 
    init_logger();

    assert_eq!(simplify("a+b+7"), Err(Error::MalformedTerm("7".into())));
    assert_eq!(simplify("a--b"), Err(Error::MalformedTerm("-".into())));

    let e = simplify("x+y3").unwrap_err();
    assert_eq!(e.to_string(), "malformed term: y3");
}

#[test]
fn idempotent() { 
    init_logger();

    let inputs = [
        "a+a+b-3cd",
        "dc+3ac-ba+bc",
        "-abc+3a+2ac",
        "xyz-xz",
        "b-a+ba",
        "5x-2yx+3zzy",
        "",
    ];

    for x in inputs { 
        let s1 = simplify(x).unwrap();
        let s2 = simplify(&s1).unwrap();
        assert_eq!(s1, s2, "input: {x}");
    }
}

#[test]
fn commutative() { 
    init_logger();

    let terms = ["a", "-2bc", "3ab", "-b", "cb", "-ba"];
    let expected = simplify(&join(&terms)).unwrap();
    assert_eq!(expected, "a-b+2ab-bc");

    for p in terms.iter().copied().permutations(terms.len()) { 
        let s = join(&p);
        assert_eq!(simplify(&s).unwrap(), expected, "input: {s}");
    }
}

#[test]
fn tokens_round_trip() { 
    let poly = "-3ab+c-d";
    let s = tokenize(poly).iter().map(|t| t.as_str()).join("+");
    assert_eq!(s, "-3ab+c+-d");
    assert_eq!(simplify(poly).unwrap(), "c-d-3ab");
}
