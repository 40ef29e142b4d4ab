mod repos_test;
