mod log_with_no_commits_prints_nothing;
