use assert_cmd::Command;
use predicates::prelude::*;

fn tracker() -> Command {
    Command::cargo_bin("expense-tracker").unwrap()
}

#[test]
fn fixed_run_reports_summary_and_alerts() {
    tracker()
        .arg("--fixed")
        .write_stdin("12000\n3000\n6000\n2500\n1000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL EXPENSES         : 24500.00\n"))
        .stdout(predicate::str::contains("AVERAGE EXPENSE        : 4900.00\n"))
        .stdout(predicate::str::contains("HIGHEST CATEGORY       : Food (12000.00)\n"))
        .stdout(predicate::str::contains("LOWEST CATEGORY        : Other (1000.00)\n"))
        .stdout(predicate::str::contains(
            "ALERT: Food exceeded the budget limit (10000.00)!\n",
        ))
        .stdout(predicate::str::contains("Entertainment exceeded").not())
        .stdout(predicate::str::contains(" Summary: 1 category(ies) exceeded budget.\n"));
}

#[test]
fn fixed_run_with_two_violations() {
    tracker()
        .arg("--fixed")
        .write_stdin("12000\n3000\n6000\n3500\n1000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALERT: Food exceeded"))
        .stdout(predicate::str::contains("ALERT: Entertainment exceeded"))
        .stdout(predicate::str::contains(" Summary: 2 category(ies) exceeded budget.\n"));
}

#[test]
fn fixed_run_within_budget() {
    tracker()
        .arg("--fixed")
        .write_stdin("10000\n5000\n8000\n3000\n2000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- All expenses are within budget limits. Excellent financial management!\n",
        ))
        .stdout(predicate::str::contains("ALERT:").not());
}

#[test]
fn invalid_expenses_are_retried() {
    tracker()
        .arg("--fixed")
        .write_stdin("-1\nabc\n5\n5\n3\n1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter a non-negative number.\n")
                .count(2),
        )
        .stdout(predicate::str::contains("HIGHEST CATEGORY       : Food (5.00)\n"))
        .stdout(predicate::str::contains("LOWEST CATEGORY        : Entertainment (1.00)\n"));
}

#[test]
fn configurable_run_single_category() {
    tracker()
        .write_stdin("0\n11\nten\n1\n\nRent\n0\n1500\n1500\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter a number between 1 and 10.\n\n")
                .count(3),
        )
        .stdout(predicate::str::contains(
            "Category name cannot be empty. Please enter a valid name: ",
        ))
        .stdout(predicate::str::contains("Invalid input. Please enter a positive number.\n\n"))
        .stdout(predicate::str::contains("Your Budget Limits:\n  - Rent      : LKR 1500.00\n"))
        .stdout(predicate::str::contains("TOTAL EXPENSES      : LKR 1500.00\n"))
        .stdout(predicate::str::contains("AVERAGE EXPENSE     : LKR 1500.00\n"))
        .stdout(predicate::str::contains("HIGHEST CATEGORY    : Rent (LKR 1500.00)\n"))
        .stdout(predicate::str::contains("LOWEST CATEGORY     : Rent (LKR 1500.00)\n"))
        .stdout(predicate::str::contains("within budget limits"));
}

#[test]
fn closed_input_fails() {
    tracker()
        .arg("--fixed")
        .write_stdin("100\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));
}

#[test]
fn json_export_follows_report() {
    tracker()
        .args(["--fixed", "--export", "json", "--currency", "USD"])
        .write_stdin("1\n2\n3\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - Food: USD 10000.00\n"))
        .stdout(predicate::str::contains("\"currency\": \"USD\""))
        .stdout(predicate::str::contains("\"over_budget_count\": 0"));
}

#[test]
fn empty_currency_is_rejected() {
    tracker()
        .args(["--fixed", "--currency", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("currency label cannot be empty"));
}

#[test]
fn oversized_expenses_are_retried() {
    tracker()
        .arg("--fixed")
        .write_stdin("90000000000000000\n90000000000000000\n0\n0\n0\n0\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter a non-negative number.\n")
                .count(2),
        )
        .stdout(predicate::str::contains("TOTAL EXPENSES         : 0.00\n"));
}

#[test]
fn verbose_run_logs_completion() {
    tracker()
        .args(["--fixed", "-v"])
        .write_stdin("12000\n3000\n6000\n2500\n1000\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "session complete: 5 categories, total 24500.00, 1 over budget",
        ));
}
