mod deploy_contract;
