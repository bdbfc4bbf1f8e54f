mod budget_tests;
