//! Tests for trace generation.

mod common;

use common::*;
use declare_logmaker::*;

fn make_log(
    config: GenerationConfig,
    compliant: &mut dyn BoundedWalker,
    violating: Option<&mut dyn BoundedWalker>,
) -> EventLog {
    let mut maker = LogMaker::new(config);
    maker
        .create_log("Loan", compliant, violating, &archive())
        .unwrap()
        .clone()
}

#[test]
fn test_log_has_exactly_n_traces() {
    for (n, v) in [(0, 0), (1, 0), (1, 1), (5, 2), (17, 17), (40, 3)] {
        let mut compliant = ScriptedWalker::new(&["ab"]);
        let mut violating = ScriptedWalker::new(&["x"]);
        let log = make_log(config(n, v, 0, 5), &mut compliant, Some(&mut violating));
        assert_eq!(log.len(), n, "N={n}, V={v}");
    }
}

#[test]
fn test_first_n_minus_v_traces_from_compliant_walker() {
    let mut compliant = ScriptedWalker::new(&["ab", "abc"]);
    let mut violating = ScriptedWalker::new(&["xy"]);
    let log = make_log(config(5, 2, 0, 5), &mut compliant, Some(&mut violating));

    assert_eq!(compliant.resets, 3);
    assert_eq!(violating.resets, 2);

    for (i, trace) in log.traces.iter().enumerate() {
        let symbols = &trace.encodings.as_ref().unwrap().symbols;
        if i < 3 {
            assert!(
                symbols.chars().all(|c| COMPLIANT_SYMBOLS.contains(&c)),
                "trace {i} should be compliant, got {symbols}"
            );
        } else {
            assert_eq!(symbols, "xy", "trace {i} should come from the violating walker");
        }
    }
}

#[test]
fn test_without_violating_walker_all_traces_compliant() {
    let mut compliant = ScriptedWalker::new(&["a"]);
    let log = make_log(config(4, 4, 0, 5), &mut compliant, None);

    assert_eq!(compliant.resets, 4);
    assert!(log.symbol_strings().all(|s| s == "a"));
}

#[test]
fn test_event_counts_within_bounds() {
    let (min, max) = (2, 6);
    let mut compliant = RandomLengthWalker::new(1, &COMPLIANT_SYMBOLS, min, max);
    let mut violating = RandomLengthWalker::new(2, &VIOLATING_SYMBOLS, min, max);
    let log = make_log(config(200, 50, min, max), &mut compliant, Some(&mut violating));

    for trace in &log.traces {
        assert!(
            (min..=max).contains(&trace.len()),
            "{} has {} events",
            trace.name,
            trace.len()
        );
    }
}

#[test]
fn test_timestamps_non_decreasing_within_trace() {
    let mut compliant = RandomLengthWalker::new(3, &COMPLIANT_SYMBOLS, 1, 30);
    let log = make_log(config(50, 0, 1, 30), &mut compliant, None);

    for trace in &log.traces {
        for pair in trace.events.windows(2) {
            assert!(
                pair[0].timestamp <= pair[1].timestamp,
                "{}: {} after {}",
                trace.name,
                pair[0].timestamp,
                pair[1].timestamp
            );
        }
    }
}

#[test]
fn test_events_carry_task_names_and_complete_lifecycle() {
    let mut compliant = ScriptedWalker::new(&["abc"]);
    let log = make_log(config(1, 0, 3, 3), &mut compliant, None);

    let names: Vec<&str> = log.traces[0]
        .events
        .iter()
        .map(|e| e.task_name.as_str())
        .collect();
    assert_eq!(names, ["Send docs", "Receive grant", "Sign contract"]);
    assert!(log.traces[0]
        .events
        .iter()
        .all(|e| e.lifecycle == Lifecycle::Complete));
}

#[test]
fn test_trace_names_zero_padded() {
    let mut walker = ScriptedWalker::new(&["a"]);
    let log = make_log(config(12, 0, 0, 1), &mut walker, None);
    assert_eq!(log.traces[0].name, "Synthetic trace no. 00");
    assert_eq!(log.traces[11].name, "Synthetic trace no. 11");

    let mut walker = ScriptedWalker::new(&["a"]);
    let log = make_log(config(10, 0, 0, 1), &mut walker, None);
    assert_eq!(log.traces[0].name, "Synthetic trace no. 0");
    assert_eq!(log.traces[9].name, "Synthetic trace no. 9");

    let mut walker = ScriptedWalker::new(&["a"]);
    let log = make_log(config(1, 0, 0, 1), &mut walker, None);
    assert_eq!(log.traces[0].name, "Synthetic trace no. 0");
}

#[test]
fn test_log_metadata() {
    let mut walker = ScriptedWalker::new(&["a"]);
    let log = make_log(config(2, 0, 0, 1), &mut walker, None);

    assert_eq!(log.name, "Synthetic log for process: Loan");
    assert_eq!(log.lifecycle_model, "standard");
    assert_eq!(log.extensions.len(), 3);
    assert_eq!(log.classifiers.len(), 1);
}

#[test]
fn test_empty_trace_encodings() {
    let mut walker = ScriptedWalker::new(&[""]);
    let log = make_log(config(2, 0, 0, 0), &mut walker, None);

    for trace in &log.traces {
        assert!(trace.is_empty());
        let enc = trace.encodings.as_ref().unwrap();
        assert_eq!(enc.char_mapped, ">");
        assert_eq!(enc.symbols, "");
    }
}

#[test]
fn test_char_mapped_encoding_matches_symbols() {
    let mut compliant = RandomLengthWalker::new(9, &COMPLIANT_SYMBOLS, 1, 8);
    let mut violating = RandomLengthWalker::new(10, &VIOLATING_SYMBOLS, 1, 8);
    let log = make_log(config(30, 10, 1, 8), &mut compliant, Some(&mut violating));

    for trace in &log.traces {
        let enc = trace.encodings.as_ref().unwrap();
        let inner = enc
            .char_mapped
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap();
        let pairs: Vec<&str> = inner.split(';').collect();
        assert_eq!(pairs.len(), enc.symbols.chars().count());

        for (pair, symbol) in pairs.iter().zip(enc.symbols.chars()) {
            let (sym, task) = pair.split_once('=').unwrap();
            assert_eq!(sym, symbol.to_string());
            assert_eq!(Some(task), archive().resolve(symbol));
        }
    }
}

#[test]
fn test_char_mapped_format() {
    let mut walker = ScriptedWalker::new(&["ab"]);
    let log = make_log(config(1, 0, 2, 2), &mut walker, None);
    let enc = log.traces[0].encodings.as_ref().unwrap();
    assert_eq!(enc.char_mapped, "<a=Send docs;b=Receive grant>");
    assert_eq!(enc.symbols, "ab");
}

#[test]
fn test_retention_cap_limits_encodings() {
    let config = GenerationConfig::builder()
        .traces_in_log(5usize)
        .max_retained_encodings(2usize)
        .build()
        .unwrap();
    let mut walker = ScriptedWalker::new(&["ab"]);
    let log = make_log(config, &mut walker, None);

    assert_eq!(log.len(), 5);
    assert!(log.traces[..2].iter().all(|t| t.encodings.is_some()));
    assert!(log.traces[2..].iter().all(|t| t.encodings.is_none()));
    // Events are still generated beyond the cap.
    assert!(log.traces.iter().all(|t| t.len() == 2));
    assert_eq!(log.symbol_strings().count(), 2);
}

#[test]
fn test_unknown_symbol_fails() {
    let mut walker = ScriptedWalker::new(&["a", "q"]);
    let mut maker = LogMaker::new(config(3, 0, 0, 2));
    let result = maker.create_log("Loan", &mut walker, None, &archive());

    match result {
        Err(Error::Generation(GenerationError::UnknownSymbol { trace, symbol })) => {
            assert_eq!(trace, 1);
            assert_eq!(symbol, 'q');
        }
        other => panic!("expected unknown symbol error, got {:?}", other.map(|l| l.len())),
    }
    assert!(maker.log().is_none());
}

#[test]
fn test_legend_independent_of_counts() {
    let legend_for = |n, v| {
        let mut compliant = ScriptedWalker::new(&["a"]);
        let mut violating = ScriptedWalker::new(&["x"]);
        make_log(config(n, v, 0, 1), &mut compliant, Some(&mut violating)).legend
    };

    let expected = "# Legend:\n# {a=Send docs, b=Receive grant, c=Sign contract, x=Skip review, y=Pay twice}\n";
    assert_eq!(legend_for(0, 0), expected);
    assert_eq!(legend_for(3, 1), expected);
    assert_eq!(legend_for(50, 50), expected);
    assert_eq!(render_legend(&archive()), expected);
}

#[test]
fn test_create_log_replaces_previous_log() {
    let mut maker = LogMaker::new(config(2, 0, 0, 3));

    let mut first = ScriptedWalker::new(&["abc"]);
    maker.create_log("First", &mut first, None, &archive()).unwrap();

    let mut second = ScriptedWalker::new(&["b"]);
    maker.create_log("Second", &mut second, None, &archive()).unwrap();

    let log = maker.log().unwrap();
    assert_eq!(log.name, "Synthetic log for process: Second");
    assert!(log.symbol_strings().all(|s| s == "b"));

    maker.set_config(config(1, 0, 0, 1));
    assert!(maker.log().is_none());
}

#[test]
fn test_generate_without_log_maker() {
    use rand::SeedableRng;

    let mut walker = ScriptedWalker::new(&["ab"]);
    let mut timestamps = TimestampSynthesizer::new(rand::rngs::StdRng::seed_from_u64(1));
    let log = generate(
        &config(3, 0, 2, 2),
        "Loan",
        &mut walker,
        None,
        &archive(),
        &mut timestamps,
    )
    .unwrap();

    assert_eq!(log.len(), 3);
    assert_eq!(log.name, "Synthetic log for process: Loan");
}
