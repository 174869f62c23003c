mod help_contract;
