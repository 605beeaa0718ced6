let a = 3;
let b = 4;
let c = 5;

c;

fn cmd(args: &str, split: bool) -> String {
    let parts: Vec<&str> = if split {
        args.split_whitespace().collect()
    } else {
        vec![args]
    };
    let output = run(&parts);
    output
}

let banner = "inline\nprobe";
let ___x___ = "scratch";
___x___;
banner;

struct Visitor;
