mod update_contract;
