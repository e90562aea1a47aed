use crate::add_test;
use crate::common::Fixture;

// An unavailable first candidate falls through to the next one
add_test!(falls_back_to_next_candidate, async {
    let fixture = Fixture::with_files(&[("index.html", &[b'a'; 200])]);
    fixture.install_compressor("fakegz");

    let output = fixture
        .run(&["-c", "nonexistent_tool", "-c", "fakegz", &fixture.site_arg()])
        .await;
    assert!(output.status.success());
    assert!(fixture.exists("index.html.gz"));
});

// The first available candidate wins; later ones are never invoked
add_test!(first_available_candidate_wins, async {
    let fixture = Fixture::with_files(&[("index.html", &[b'a'; 200])]);
    fixture.install_compressor("first");
    fixture.install_compressor("second");

    let output = fixture
        .run(&["-c", "first", "-c", "second", &fixture.site_arg()])
        .await;
    assert!(output.status.success());

    assert!(!fixture.recorded_args("first").is_empty());
    assert!(fixture.recorded_args("second").is_empty());
});

// Fixed arguments ride along, with the source path appended last
add_test!(fixed_arguments_preserved, async {
    let fixture = Fixture::with_files(&[("index.html", &[b'a'; 200])]);
    fixture.install_compressor("fakegz");

    let output = fixture
        .run(&["-c", "fakegz --best -q", &fixture.site_arg()])
        .await;
    assert!(output.status.success());

    let args = fixture.recorded_args("fakegz");
    assert_eq!(args[..2], ["--best", "-q"]);
    assert!(args[2].ends_with("index.html"));
});

// With no resolvable candidate the run fails before touching the tree
add_test!(no_compressor_means_no_writes, async {
    let fixture = Fixture::with_files(&[("index.html", &[b'a'; 200])]);

    let output = fixture
        .run(&["-c", "missing-one", "-c", "missing-two -9", &fixture.site_arg()])
        .await;
    assert!(!output.status.success());

    assert!(output.stderr.contains("No usable compressor"));
    assert!(output.stderr.contains("missing-one"));
    assert!(output.stderr.contains("missing-two -9"));
    assert!(!fixture.exists("index.html.gz"));
});

// The default candidate list is still honored when PATH provides gzip
add_test!(default_candidates_resolve_from_path, async {
    let fixture = Fixture::with_files(&[("index.html", &[b'a'; 200])]);
    // Stand-ins named after the real default candidates
    fixture.install_compressor("zopfli");
    fixture.install_compressor("gzip");

    let output = fixture.run(&[&fixture.site_arg()]).await;
    assert!(output.status.success());

    // zopfli comes first in the default preference order
    assert!(!fixture.recorded_args("zopfli").is_empty());
    assert!(fixture.recorded_args("gzip").is_empty());
});
