mod commands_outside_a_repository_fail;
