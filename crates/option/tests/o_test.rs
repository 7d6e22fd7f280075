use std::cell::Cell;

use option::O;

#[derive(Debug, Clone, PartialEq, Default)]
struct Record {
    id: i64,
}

#[test]
fn display() {
    assert_eq!(O::<Record>::none().to_string(), "None");
    assert_eq!(O::some(42).to_string(), "Some(42)");
    assert_eq!(O::some("hi").to_string(), "Some(\"hi\")");
    assert_eq!(O::some(Record { id: 1 }).to_string(), "Some(Record { id: 1 })");
}

#[test]
fn value_present() {
    assert_eq!(O::some(42).value(), 42);
    assert_eq!(O::some(Record { id: 7 }).value(), Record { id: 7 });
}

#[test]
#[should_panic(expected = "absent value")]
fn value_absent_panics() {
    O::<i32>::none().value();
}

#[test]
#[should_panic(expected = "need a port")]
fn expect_absent_panics_with_message() {
    O::<u16>::none().expect("need a port");
}

#[test]
fn presence_is_exclusive() {
    let some = O::some(0);
    assert!(some.present());
    assert!(!some.absent());

    let none = O::<i32>::none();
    assert!(none.absent());
    assert!(!none.present());
}

#[test]
fn some_of_default_is_still_present() {
    assert!(O::some(0).present());
    assert_ne!(O::some(0), O::none());
    assert!(O::some(Record::default()).present());
}

#[test]
fn value_or() {
    assert_eq!(O::some(42).value_or(0), 42);
    assert_eq!(O::none().value_or(42), 42);
}

#[test]
fn value_or_by_is_lazy() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        0
    };
    assert_eq!(O::some(42).value_or_by(supplier), 42);
    assert_eq!(calls.get(), 0);

    let supplier = || {
        calls.set(calls.get() + 1);
        42
    };
    assert_eq!(O::none().value_or_by(supplier), 42);
    assert_eq!(calls.get(), 1);
}

#[test]
fn alt() {
    let opt = O::some(42);
    assert_eq!(opt.alt(O::none()), opt);
    assert_eq!(opt.alt(O::some(1)), opt);

    assert_eq!(O::none().alt(O::some(42)), O::some(42));
    assert_eq!(O::<i32>::none().alt(O::none()), O::none());
}

#[test]
fn alt_by_is_lazy() {
    let calls = Cell::new(0);

    let opt = O::some(42);
    let got = opt.alt_by(|| {
        calls.set(calls.get() + 1);
        O::none()
    });
    assert_eq!(got, opt);
    assert_eq!(calls.get(), 0);

    let got = O::none().alt_by(|| {
        calls.set(calls.get() + 1);
        O::some(42)
    });
    assert_eq!(got.value(), 42);
    assert_eq!(calls.get(), 1);
}

#[test]
fn alt_by_chain_stops_at_first_present() {
    let tried = Cell::new(0);
    let source = |v: O<&'static str>| {
        tried.set(tried.get() + 1);
        v
    };

    let got = O::none()
        .alt_by(|| source(O::none()))
        .alt_by(|| source(O::some("env")))
        .alt_by(|| source(O::some("file")));

    assert_eq!(got, O::some("env"));
    assert_eq!(tried.get(), 2);
}

#[test]
fn map_and_refs() {
    assert_eq!(O::some(2).map(|v| v * 10), O::some(20));
    assert_eq!(O::<i32>::none().map(|v| v * 10), O::none());

    let owned = O::some(String::from("abc"));
    assert_eq!(owned.as_ref().map(|s| s.len()), O::some(3));

    let mut counter = O::some(1);
    if let O::Some(v) = counter.as_mut() {
        *v += 1;
    }
    assert_eq!(counter, O::some(2));
}

#[test]
fn std_option_conversions() {
    assert_eq!(O::<i32>::from(Some(5)), O::some(5));
    assert_eq!(O::<i32>::from(None), O::none());

    let back: Option<i32> = O::some(5_i32).into();
    assert_eq!(back, Some(5));
    let back: Option<i32> = O::<i32>::none().into();
    assert_eq!(back, None);
}

#[test]
fn default_is_absent() {
    assert!(O::<Record>::default().absent());
}
