use gostack_digest::aggregator::{digest_text, Digest};
use gostack_digest::output::{
    build_json_report, render_report, write_json_report, write_text_report, GroupOrder,
    ReportOptions,
};
use gostack_digest::parser::GrammarOptions;
use pretty_assertions::assert_eq;

const SINGLE: &str = "goroutine 1 [chan receive, 5 minutes]:\nmain.foo(0x1)\n\t/a/b.go:10 +0x5\ncreated by main.bar in goroutine 0\n\t/a/c.go:20 +0x1\n\n";

fn mixed_digest() -> Digest {
    let mut dump = String::new();
    for id in 0..3 {
        dump += &format!(
            "goroutine {} [semacquire, {} minutes]:\nsync.runtime_Semacquire(0x1)\n\t/go/src/runtime/sema.go:62 +0x25\nmain.(*store).Get(0x2)\n\t/app/internal/store/store.go:118 +0x4d\ncreated by main.serve in goroutine 1\n\t/app/main.go:40 +0x1\n\n",
            id + 10,
            id + 1
        );
    }
    dump += "goroutine 2 [IO wait]:\ninternal/poll.runtime_pollWait(0x1)\n\t/go/src/runtime/netpoll.go:343 +0x85\ncreated by main.listen in goroutine 1\n\t/app/main.go:30 +0x1\n\n";
    dump += "garbage\n\n";

    digest_text(&dump, &GrammarOptions::default())
}

#[test]
fn test_single_block_report() {
    let digest = digest_text(SINGLE, &GrammarOptions::default());
    let lines = render_report(&digest, &ReportOptions::default());

    assert_eq!(
        lines,
        vec![
            "count:1 waiting:5-5 status:chan receive".to_string(),
            "b.go:10  main.foo".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn test_report_alignment_and_errors() {
    let digest = mixed_digest();
    let options = ReportOptions {
        print_errors: true,
        ..Default::default()
    };

    let lines = render_report(&digest, &options);

    assert_eq!(
        lines,
        vec![
            "count:1 waiting:0-0 status:IO wait",
            "netpoll.go:343  internal/poll.runtime_pollWait",
            "",
            "count:3 waiting:1-3 status:semacquire",
            "sema.go:62    sync.runtime_Semacquire",
            "store.go:118  main.(*store).Get",
            "",
            "errors:1",
        ]
    );
}

#[test]
fn test_min_count_filter() {
    let digest = mixed_digest();

    let all = ReportOptions {
        min_count: 0,
        ..Default::default()
    };
    assert_eq!(render_report(&digest, &all).len(), 7);

    let none = ReportOptions {
        min_count: 4,
        print_errors: true,
        ..Default::default()
    };
    assert_eq!(render_report(&digest, &none), vec!["errors:1"]);

    let big_only = ReportOptions {
        min_count: 2,
        ..Default::default()
    };
    assert_eq!(render_report(&digest, &big_only)[0], "count:3 waiting:1-3 status:semacquire");
}

#[test]
fn test_count_order() {
    let digest = mixed_digest();
    let options = ReportOptions {
        order: GroupOrder::Count,
        ..Default::default()
    };

    let lines = render_report(&digest, &options);
    assert_eq!(lines[0], "count:3 waiting:1-3 status:semacquire");
}

#[test]
fn test_write_text_report() {
    let digest = digest_text(SINGLE, &GrammarOptions::default());
    let mut out = Vec::new();

    write_text_report(&mut out, &digest, &ReportOptions::default()).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "count:1 waiting:5-5 status:chan receive\nb.go:10  main.foo\n\n"
    );
}

#[test]
fn test_json_report() {
    let digest = mixed_digest();
    let options = ReportOptions {
        min_count: 2,
        ..Default::default()
    };

    let report = build_json_report(&digest, &options);
    assert_eq!(report.total_blocks, 5);
    assert_eq!(report.error_count, 1);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].frames[1].file, "store.go");
    assert_eq!(report.groups[0].frames[1].function, "main.(*store).Get");

    let mut out = Vec::new();
    write_json_report(&mut out, &digest, &options).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["groups"][0]["count"], 3);
    assert_eq!(value["groups"][0]["statuses"][0], "semacquire");
}
