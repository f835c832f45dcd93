use minforth_fuzz::check_session;

fn run_fuzz_case(lines: &[&str]) {
    let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    check_session(&lines);
}

#[test]
fn regression_self_recursion() {
    run_fuzz_case(&[": a a ;", "a"]);
}

#[test]
fn regression_mutual_recursion_through_redefinition() {
    run_fuzz_case(&[": a b ; : b 1 ;", "a", ": b a ;", "a ."]);
}

#[test]
fn regression_definition_start_in_body() {
    run_fuzz_case(&[": a : ;", "a a a", "b ; a"]);
}

#[test]
fn regression_redefined_colon() {
    run_fuzz_case(&[": : : ;", ": a 1 ;", "; ;"]);
}

#[test]
fn regression_min_div_minus_one() {
    run_fuzz_case(&["-9223372036854775808 -1 / . 9223372036854775807 dup * ."]);
}

#[test]
fn regression_open_definition_at_end() {
    run_fuzz_case(&[": c", "1 2 +"]);
}
