//! A segmenter is plain immutable data: one instance serves many threads.

use segmint::{Options, Segmenter, StepState};

#[test]
fn shared_segmenter_across_threads() {
    let seg = Segmenter::new(Options::default());
    let texts = [
        "Mr. Smith went to the U.S.A. yesterday.",
        "What?! No way... Really?",
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1E9}\u{1F1EA}",
        "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}",
    ];
    let expected: Vec<(usize, usize, usize, usize)> = texts
        .iter()
        .map(|t| {
            (
                seg.grapheme_count(*t),
                seg.word_count(*t),
                seg.sentence_count(*t),
                seg.width(*t),
            )
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let text = texts[i % texts.len()];
                let seg = &seg;
                scope.spawn(move || {
                    (
                        seg.grapheme_count(text),
                        seg.word_count(text),
                        seg.sentence_count(text),
                        seg.width(text),
                    )
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), expected[i % texts.len()]);
        }
    });
}

#[test]
fn states_move_between_threads() {
    let seg = Segmenter::default();
    let text = "First part. Second";
    let first = seg.step(text, StepState::default());
    let (rest, state) = (first.remainder, first.state);
    let bits = state.to_bits();
    let resumed = std::thread::spawn(move || {
        let state = StepState::from_bits(bits).unwrap();
        let mut rest = rest;
        let mut state = state;
        let mut clusters = 1;
        while !rest.is_empty() {
            let out = Segmenter::default().step(rest, state);
            rest = out.remainder;
            state = out.state;
            clusters += 1;
        }
        clusters
    })
    .join()
    .unwrap();
    assert_eq!(resumed, seg.grapheme_count(text));
}
